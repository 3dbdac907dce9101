//! Integration points for an external memory manager.
//!
//! Values free their own storage, so there is nothing for these hooks to do.
//! They exist so generated code can call them unconditionally and must stay
//! safe to call at any time, including before any value exists.

/// Collection hook. Does nothing.
pub fn collect() {
    tracing::trace!("gc collect (no-op)");
}

/// End-of-program hook. Does nothing.
pub fn final_cleanup() {
    tracing::trace!("gc final cleanup (no-op)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_are_callable_repeatedly() {
        collect();
        final_cleanup();
        collect();
        final_cleanup();
    }
}
