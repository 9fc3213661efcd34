pub mod context;
pub mod dashboard_service;
pub mod members_service;
pub mod rooms_service;
pub mod stages_service;

pub use dashboard_service::DashboardService;
pub use members_service::MembersService;
pub use rooms_service::RoomsService;
pub use stages_service::StagesService;
