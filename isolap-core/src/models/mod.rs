pub mod detection;
pub mod interval;

// re-export for cleaner imports
pub use self::detection::DetectionResult;
pub use self::interval::Interval;
