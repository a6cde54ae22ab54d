//! Services module
//!
//! Este módulo contiene la lógica de negocio: el ciclo de vida de trips,
//! la coordinación de mantenimiento, la agregación de analytics y la
//! autenticación. Las operaciones que tocan varias entidades ejecutan
//! dentro de una transacción.

pub mod analytics_service;
pub mod auth_service;
pub mod maintenance_service;
pub mod trip_service;

pub use analytics_service::AnalyticsService;
pub use auth_service::AuthService;
pub use maintenance_service::MaintenanceService;
pub use trip_service::TripService;
