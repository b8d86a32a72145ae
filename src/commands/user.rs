use anyhow::Result;

use super::Context;

pub fn run(ctx: Context, user_id: &str) -> Result<()> {
    let mut fitcal = ctx.fitcal;
    fitcal.set_user_id(user_id)?;

    println!("Default user set to {}", user_id);

    Ok(())
}
