pub mod render_sql;
