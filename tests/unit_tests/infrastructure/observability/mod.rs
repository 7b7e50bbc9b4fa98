mod request_id_test;
