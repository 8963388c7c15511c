//! Leptos UI components

mod account_menu;
mod category_menu;
mod desktop_menu;
mod footer;
mod header;
mod layout;
mod lazy_route;
mod mobile_menu;
mod not_found;
mod page_loader;
mod route_view;
mod search_box;

pub use account_menu::AccountMenu;
pub use category_menu::{CategoryMenu, MenuVariant, SubmenuList};
pub use desktop_menu::DesktopMenu;
pub use footer::Footer;
pub use header::{Header, NavBar, NavStatusView};
pub use layout::PublicLayout;
pub use lazy_route::LazyRoute;
pub use mobile_menu::MobileMenu;
pub use not_found::NotFound;
pub use route_view::RouteView;
pub use page_loader::PageLoader;
pub use search_box::SearchBox;
