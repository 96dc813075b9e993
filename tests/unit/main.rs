mod catalog_table_tests;
mod cli_command_parse_tests;
mod config_tests;
mod route_table_tests;
