//! Project types, library options and advisory steps

use std::fmt;
use std::path::{Path, PathBuf};

/// Supported project kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// Next.js web application
    WebApp,
    /// TypeScript command-line tool
    CommandLineTool,
}

impl ProjectType {
    /// Every supported project type, in menu order
    pub const ALL: [ProjectType; 2] = [ProjectType::WebApp, ProjectType::CommandLineTool];

    /// Stable identifier used for prompt values
    pub fn key(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "nextjs",
            ProjectType::CommandLineTool => "typescript-cli",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::WebApp => "Next.js",
            ProjectType::CommandLineTool => "TypeScript CLI",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Library options offered during post-setup for this project type
    pub fn library_options(&self) -> &'static [LibraryOption] {
        match self {
            ProjectType::WebApp => &LibraryOption::ALL,
            ProjectType::CommandLineTool => &[],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional add-ons selectable during post-setup
///
/// Each option belongs to exactly one project type's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryOption {
    /// Prisma ORM with schema, seed script and client wrapper
    Orm,
    /// Prisma plus a PostgreSQL docker-compose setup
    OrmContainer,
    /// NextAuth scaffold
    AuthScaffold,
    /// TanStack Query provider
    QueryClient,
}

impl LibraryOption {
    pub const ALL: [LibraryOption; 4] = [
        LibraryOption::Orm,
        LibraryOption::OrmContainer,
        LibraryOption::AuthScaffold,
        LibraryOption::QueryClient,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LibraryOption::Orm => "prisma",
            LibraryOption::OrmContainer => "prisma-docker",
            LibraryOption::AuthScaffold => "next-auth",
            LibraryOption::QueryClient => "tanstack-query",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LibraryOption::Orm => "Prisma",
            LibraryOption::OrmContainer => "Prisma + Docker",
            LibraryOption::AuthScaffold => "NextAuth",
            LibraryOption::QueryClient => "TanStack Query",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            LibraryOption::Orm => "schema, seed script and client",
            LibraryOption::OrmContainer => "adds a PostgreSQL docker-compose service",
            LibraryOption::AuthScaffold => "auth config and route handler",
            LibraryOption::QueryClient => "client-side query provider",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.key() == key)
    }

    /// The project type whose menu offers this option
    pub fn project_type(&self) -> ProjectType {
        ProjectType::WebApp
    }

    /// Shared dependencies that must be present before this option's installers run
    pub fn base_dependencies(&self) -> &'static [BaseDependency] {
        match self {
            LibraryOption::Orm | LibraryOption::OrmContainer => &[BaseDependency::TSX],
            LibraryOption::AuthScaffold | LibraryOption::QueryClient => &[],
        }
    }
}

impl fmt::Display for LibraryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A package installed once per post-setup when any selected option needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseDependency {
    pub package: &'static str,
    pub dev: bool,
}

impl BaseDependency {
    /// Runs TypeScript seed scripts
    pub const TSX: BaseDependency = BaseDependency {
        package: "tsx",
        dev: true,
    };
}

/// A follow-up command the user should run manually
///
/// Purely advisory: the tool never executes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInstallationStep {
    pub command: String,
    pub args: Vec<String>,
    pub description: String,
}

impl PostInstallationStep {
    pub fn new(command: &str, args: &[&str], description: &str) -> Self {
        Self {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// The full command line, e.g. `npx prisma db seed`
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PostInstallationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.command_line(), self.description)
    }
}

/// Root directory of the project being set up
///
/// Installers resolve every file they touch against this root instead of
/// the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    root: PathBuf,
}

impl ProjectDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Whether the project keeps its sources under `src/`
    pub fn has_src_dir(&self) -> bool {
        self.root.join("src").is_dir()
    }

    /// `src/` when present, otherwise the project root
    pub fn source_root(&self) -> PathBuf {
        if self.has_src_dir() {
            self.root.join("src")
        } else {
            self.root.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for t in ProjectType::ALL {
            assert_eq!(ProjectType::from_key(t.key()), Some(t));
        }
        for o in LibraryOption::ALL {
            assert_eq!(LibraryOption::from_key(o.key()), Some(o));
        }
        assert_eq!(ProjectType::from_key("rails"), None);
    }

    #[test]
    fn test_each_option_belongs_to_exactly_one_menu() {
        for option in LibraryOption::ALL {
            let menus: Vec<_> = ProjectType::ALL
                .into_iter()
                .filter(|t| t.library_options().contains(&option))
                .collect();
            assert_eq!(menus, vec![option.project_type()]);
        }
    }

    #[test]
    fn test_only_orm_options_need_tsx() {
        assert_eq!(LibraryOption::Orm.base_dependencies(), &[BaseDependency::TSX]);
        assert_eq!(
            LibraryOption::OrmContainer.base_dependencies(),
            &[BaseDependency::TSX]
        );
        assert!(LibraryOption::AuthScaffold.base_dependencies().is_empty());
        assert!(LibraryOption::QueryClient.base_dependencies().is_empty());
    }

    #[test]
    fn test_step_display() {
        let step = PostInstallationStep::new("npx", &["prisma", "db", "seed"], "Seed the database");
        assert_eq!(step.command_line(), "npx prisma db seed");
        assert_eq!(step.to_string(), "npx prisma db seed → Seed the database");
    }

    #[test]
    fn test_source_root_prefers_src() {
        let dir = tempfile::tempdir().unwrap();
        let project = ProjectDir::new(dir.path());
        assert_eq!(project.source_root(), dir.path());

        std::fs::create_dir(dir.path().join("src")).unwrap();
        assert!(project.has_src_dir());
        assert_eq!(project.source_root(), dir.path().join("src"));
    }
}
