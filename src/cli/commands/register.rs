use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{AuthLogic, Registration};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::Address;
use crate::ui::messages::{detail, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        name,
        email,
        company,
        cep,
        street,
        neighborhood,
        city,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        let session = AuthLogic::register(
            &mut pool,
            Registration {
                name: name.clone(),
                email: email.clone(),
                company: company.clone(),
                address: Address {
                    cep: cep.clone(),
                    street: street.clone(),
                    neighborhood: neighborhood.clone(),
                    city: city.clone(),
                },
            },
        )?;

        success("Registration completed! You are now logged in.");
        detail("Name", &session.user.name);
        detail("Company", &session.user.company);
        if !session.user.address.is_empty() {
            detail("Address", session.user.address.summary());
        }
        detail("Password", &session.user.password);
    }
    Ok(())
}
