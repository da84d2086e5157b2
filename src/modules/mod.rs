pub mod departments;
pub mod employees;
pub mod faqs;
pub mod health;

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::core::crud::{resource_scope, CrudService};
use crate::core::persistence::{InMemoryRepository, MySqlRepository};
use crate::core::traits::CrudRepository;
use crate::core::Resource;

use departments::{Department, DepartmentService};
use employees::{Employee, EmployeeService};
use faqs::{Faq, FaqService};

/// One service per resource family, shared across workers
#[derive(Clone)]
pub struct Services {
    pub departments: web::Data<DepartmentService>,
    pub employees: web::Data<EmployeeService>,
    pub faqs: web::Data<FaqService>,
}

fn service<E: Resource>(repository: Arc<dyn CrudRepository<E>>) -> web::Data<CrudService<E>> {
    web::Data::new(CrudService::new(repository))
}

impl Services {
    pub fn new(
        departments: Arc<dyn CrudRepository<Department>>,
        employees: Arc<dyn CrudRepository<Employee>>,
        faqs: Arc<dyn CrudRepository<Faq>>,
    ) -> Self {
        Self {
            departments: service(departments),
            employees: service(employees),
            faqs: service(faqs),
        }
    }

    /// Services backed by MySQL tables
    pub fn mysql(pool: &MySqlPool) -> Self {
        Self::new(
            Arc::new(MySqlRepository::<Department>::new(pool.clone())),
            Arc::new(MySqlRepository::<Employee>::new(pool.clone())),
            Arc::new(MySqlRepository::<Faq>::new(pool.clone())),
        )
    }

    /// Services backed by process-local storage
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Department>::new()),
            Arc::new(InMemoryRepository::<Employee>::new()),
            Arc::new(InMemoryRepository::<Faq>::new()),
        )
    }
}

/// Mount every resource family under `/api` plus the health probes
pub fn configure(services: Services) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.configure(health::configure).service(
            web::scope("/api")
                .service(resource_scope(services.departments))
                .service(resource_scope(services.employees))
                .service(resource_scope(services.faqs)),
        );
    }
}
