mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod notes;
pub use notes::Notes;

mod signed_out;
pub use signed_out::SignedOut;
