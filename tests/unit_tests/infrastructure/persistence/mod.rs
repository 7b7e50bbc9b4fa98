mod in_memory_website_repository_test;
