//! Contract tests for the conversion component
