pub mod table_state;
