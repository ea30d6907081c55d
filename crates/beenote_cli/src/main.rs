//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `beenote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("beenote_core ping={}", beenote_core::ping());
    println!("beenote_core version={}", beenote_core::core_version());
}
