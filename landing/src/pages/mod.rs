// Routed pages

mod blog;
mod blog_post;
mod home;
mod integrations;
mod mcp;
mod not_found;
mod product;
mod project_detail;
mod projects;
mod releases;

pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use home::HomePage;
pub use integrations::IntegrationsPage;
pub use mcp::McpPage;
pub use not_found::NotFoundPage;
pub use product::ProductPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use releases::ReleasesPage;
