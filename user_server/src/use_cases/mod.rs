pub mod get_user;
pub mod list_users;
pub mod register_user;

#[cfg(test)]
pub mod test_support;
