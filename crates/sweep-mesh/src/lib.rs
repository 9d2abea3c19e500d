pub mod gen_cylinder;
pub mod obj;
pub mod revolution;
pub mod surface;

pub use gen_cylinder::make_gen_cyl;
pub use revolution::{make_surf_rev, revolve};
pub use surface::Surface;
