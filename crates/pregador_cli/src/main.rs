//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pregador_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("pregador_core ping={}", pregador_core::ping());
    println!("pregador_core version={}", pregador_core::core_version());
}
