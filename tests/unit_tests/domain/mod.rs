mod component_type_test;
mod generation_test;
