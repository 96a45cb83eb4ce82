pub mod capture_delegate;
pub mod capture_session;
pub mod frame_source;
pub mod location_provider;
pub mod share_sink;
pub mod text_rasterizer;
