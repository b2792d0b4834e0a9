//! Production one-time code generation

use rand::Rng;

use crate::traits::SecurityCodeGenerator;

/// Real code generator producing uniformly random six-digit codes
pub struct RealSecurityCodeGenerator;

impl SecurityCodeGenerator for RealSecurityCodeGenerator {
    fn generate_code(&self) -> u32 {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..1_000_000)
    }
}
