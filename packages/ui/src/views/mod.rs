mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod search;
pub use search::SearchView;
