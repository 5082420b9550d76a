//! Library installers offered by the Next.js handler

pub mod container;
pub mod next_auth;
pub mod prisma;
pub mod query_client;

pub use container::ContainerInstaller;
pub use next_auth::NextAuthInstaller;
pub use prisma::PrismaInstaller;
pub use query_client::QueryClientInstaller;
