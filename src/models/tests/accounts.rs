#[cfg(test)]
mod tests {
    use models::admins::DEFAULT_PRIVILEGES;
    use models::Admin;
    use models::CreateUserRequest;
    use models::Describe;
    use models::ModelError;
    use models::Privileges;
    use models::User;

    fn user() -> User {
        CreateUserRequest {
            first_name: "Hector".to_string(),
            last_name: "Delatorre".to_string(),
            age: 38,
            email: "hector@example.com".to_string(),
            location: "Brownwood, TX".to_string(),
        }
        .into_user()
    }

    #[test]
    fn test_describe_and_greet() {
        let user = user();

        assert_eq!(
            user.describe(),
            "User Profile:\nName: Hector Delatorre\nAge: 38\nEmail: hector@example.com\nLocation: Brownwood, TX"
        );
        assert_eq!(user.greet(), "Hello, Hector Delatorre! Welcome back!");
        assert_eq!(user.login_attempts, 0);
    }

    #[test]
    fn test_login_attempts() {
        let mut user = user();

        user.increment_login_attempts();
        user.increment_login_attempts();
        user.increment_login_attempts();
        assert_eq!(user.login_attempts, 3);

        user.increment_login_attempts_by(4).unwrap();
        assert_eq!(user.login_attempts, 7);

        assert_eq!(
            user.increment_login_attempts_by(-1),
            Err(ModelError::NonPositiveIncrement(-1))
        );
        assert_eq!(
            user.increment_login_attempts_by(0),
            Err(ModelError::NonPositiveIncrement(0))
        );
        assert_eq!(user.login_attempts, 7);

        user.reset_login_attempts();
        assert_eq!(user.login_attempts, 0);
    }

    #[test]
    fn test_admin_privileges() {
        let mut admin = Admin::new(user());

        assert_eq!(admin.describe(), user().describe());
        assert_eq!(admin.privileges.privileges.len(), DEFAULT_PRIVILEGES.len());
        assert!(admin.privileges.contains("can ban user"));
        assert!(!admin.privileges.contains("can drop tables"));
        assert_eq!(
            admin.privileges.show(),
            "Admin privileges:\n- can add post\n- can delete post\n- can ban user\n- can reset passwords"
        );

        admin.increment_login_attempts();
        assert_eq!(admin.user.login_attempts, 1);
    }

    #[test]
    fn test_custom_privileges() {
        let privileges = Privileges::new(vec!["can pin post".to_string()]);
        let admin = Admin::with_privileges(user(), privileges);

        assert_eq!(admin.privileges.show(), "Admin privileges:\n- can pin post");
        assert_eq!(admin.first_name, "Hector");
    }
}
