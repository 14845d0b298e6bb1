// Homepage sections

mod footer;
mod getting_started;
mod hero;
mod in_action;
mod integrations;
mod nav;
mod philosophy;
mod products;

pub use footer::Footer;
pub use getting_started::GettingStarted;
pub use hero::Hero;
pub use in_action::InAction;
pub use integrations::IntegrationsCloud;
pub use nav::Nav;
pub use philosophy::Philosophy;
pub use products::ProductsSection;
