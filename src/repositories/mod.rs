//! Repositorios de acceso a datos
//!
//! CRUD simple sobre el Entity Store. Las mutaciones multi-entidad del
//! ciclo de vida viven en los services, dentro de una transacción.

pub mod driver_repository;
pub mod fuel_repository;
pub mod maintenance_repository;
pub mod trip_repository;
pub mod user_repository;
pub mod vehicle_repository;
