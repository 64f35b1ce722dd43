use argon2::Config;
use rand::Rng;

// Prints the argon2 hash expected in setup.toml's admin_password_hash.
fn main() {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            eprintln!("usage: hashpw <password>");
            std::process::exit(1);
        }
    };

    let salt = rand::thread_rng().gen::<[u8; 32]>();
    let config = Config::default();
    let hash = argon2::hash_encoded(password.as_bytes(), &salt, &config).unwrap();
    println!("{}", hash);
}
