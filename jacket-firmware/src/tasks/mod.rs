// Task-Modul: Enthält alle Embassy Tasks
//
// Ein einziger Task besitzt die Jacke: er zeichnet, rendert und überträgt.
// Damit kann der Framebuffer während eines Render-Durchlaufs nicht
// verändert werden.

pub mod render;

// Re-export Tasks für einfachen Import
pub use render::render_task;
