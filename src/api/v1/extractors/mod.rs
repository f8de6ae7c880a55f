mod resource_id_path;

pub use resource_id_path::ResourceIdPath;
