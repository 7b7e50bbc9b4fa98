mod in_memory_website_repository;

pub use in_memory_website_repository::InMemoryWebsiteRepository;
