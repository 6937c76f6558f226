//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (gating, loading, sequencing)
//! and delegates rendering details to `components`.

pub mod god_detail;
pub mod god_viewer;
pub mod intro;
pub mod my_gods;
