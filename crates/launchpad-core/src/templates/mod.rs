//! Static file templates written into generated projects
//!
//! This module provides:
//! - Template identifiers for every generated file
//! - The [`TemplateStore`] capability and the built-in, compiled-in store
//! - `{{variable}}` rendering

pub mod render;

pub use render::render;

/// Identifier of a static template blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Models appended to `prisma/schema.prisma`
    PrismaSchema,
    /// `prisma/seed.ts`; expects `client_import`
    PrismaSeed,
    /// Prisma client wrapper; expects `client_import`
    PrismaClient,
    /// PostgreSQL `docker-compose.yml`
    DockerCompose,
    /// NextAuth configuration module
    AuthConfig,
    /// NextAuth route handler; expects `auth_import`
    AuthRoute,
    /// TanStack Query provider component
    QueryProviders,
    /// TypeScript CLI `package.json`; expects `name`
    CliPackageJson,
    /// TypeScript CLI `tsconfig.json`
    CliTsConfig,
    /// TypeScript CLI `src/index.ts`; expects `name`
    CliIndex,
}

impl TemplateId {
    pub const ALL: [TemplateId; 10] = [
        TemplateId::PrismaSchema,
        TemplateId::PrismaSeed,
        TemplateId::PrismaClient,
        TemplateId::DockerCompose,
        TemplateId::AuthConfig,
        TemplateId::AuthRoute,
        TemplateId::QueryProviders,
        TemplateId::CliPackageJson,
        TemplateId::CliTsConfig,
        TemplateId::CliIndex,
    ];
}

/// Supplies template text by id
pub trait TemplateStore: Send + Sync {
    fn get(&self, id: TemplateId) -> &str;
}

/// Templates compiled into the binary from `templates/`
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateStore for BuiltinTemplates {
    fn get(&self, id: TemplateId) -> &str {
        match id {
            TemplateId::PrismaSchema => include_str!("../../templates/prisma/schema.prisma"),
            TemplateId::PrismaSeed => include_str!("../../templates/prisma/seed.ts"),
            TemplateId::PrismaClient => include_str!("../../templates/prisma/client.ts"),
            TemplateId::DockerCompose => include_str!("../../templates/docker/docker-compose.yml"),
            TemplateId::AuthConfig => include_str!("../../templates/next-auth/auth.ts"),
            TemplateId::AuthRoute => include_str!("../../templates/next-auth/route.ts"),
            TemplateId::QueryProviders => {
                include_str!("../../templates/tanstack-query/providers.tsx")
            }
            TemplateId::CliPackageJson => {
                include_str!("../../templates/typescript-cli/package.json")
            }
            TemplateId::CliTsConfig => include_str!("../../templates/typescript-cli/tsconfig.json"),
            TemplateId::CliIndex => include_str!("../../templates/typescript-cli/index.ts"),
        }
    }
}
