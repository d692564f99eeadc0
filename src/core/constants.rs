pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 360_000;

// Avatar defaults: size, rating, fallback image
pub const AVATAR_SIZE: &str = "200";
pub const AVATAR_RATING: &str = "pg";
pub const AVATAR_DEFAULT_IMAGE: &str = "mm";

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Please enter valid email";
pub const INVALID_PASSWORD: &str = "Please enter valid password with >=6 char";
pub const USER_ALREADY_EXISTS: &str = "User Already exists";
pub const INVALID_BODY: &str = "Invalid request body";
pub const SERVER_ERROR: &str = "Server error!";
