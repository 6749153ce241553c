pub mod controller;
pub mod router;

pub use router::{
    init_admin_dashboard_router, init_home_router, init_student_dashboard_router,
    init_teacher_dashboard_router,
};
