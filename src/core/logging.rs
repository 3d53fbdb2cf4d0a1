//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (pico_w): Uses defmt, transported over RTT by `defmt-rtt`
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! Arguments must be primitives or `&str` (or implement `defmt::Format` on
//! target), since the same format string is handed to defmt and to `format!`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico_w")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "pico_w"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_expand_on_host() {
        let channel = 1u8;
        crate::log_info!("sampling channel {}", channel);
        crate::log_warn!("conversion failed on channel {}", channel);
        crate::log_error!("halting: {}", "no network");
        crate::log_debug!("raw reading {}", 2048u16);
    }
}
