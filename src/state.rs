#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoAdvance {
    Disabled, // Certificates carousels never rotate on their own
    Running,  // Timer armed, slides rotate every interval
    Paused,   // Pointer is over the carousel
}
