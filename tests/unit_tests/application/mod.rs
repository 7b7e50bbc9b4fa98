mod code_extraction_test;
mod demo_component_test;
mod failure_category_test;
mod site_exporter_test;
