pub mod orbit;
pub mod pointer;
pub mod resize;

pub use orbit::wire_orbit_controls;
pub use pointer::wire_pointer_parallax;
pub use resize::wire_window_resize;
