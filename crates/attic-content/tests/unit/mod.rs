mod collection_dir;
mod frontmatter_forms;
mod normalize_documents;
mod properties;
mod rendering;
