pub mod counters;
pub mod cubes;
pub mod dice;
pub mod fires;
pub mod inheritance;
pub mod lottery;
pub mod restaurants;

use models::CreateUserRequest;
use models::User;

/// Sample user shared by the entity programs.
pub fn sample_user() -> User {
    CreateUserRequest {
        first_name: "Hector".to_string(),
        last_name: "Delatorre".to_string(),
        age: 38,
        email: "hector@example.com".to_string(),
        location: "Brownwood, TX".to_string(),
    }
    .into_user()
}
