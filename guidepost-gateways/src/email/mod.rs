pub use guidepost_core::gateways::notify::EmailGateway;

mod send_to_json_file;
pub use self::send_to_json_file::SendToJsonFile;
