mod openai_compatible_client_test;
