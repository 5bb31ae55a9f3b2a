mod policy_table;
mod registration;
