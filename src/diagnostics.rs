//! Pre-flight checks for the configured synthesis setup.

use crate::config::Config;
use crate::synth::command::CommandSynthesizer;
use crate::synth::engine::SpeechSynthesizer;

/// Checks the configuration and engine availability, printing one line
/// per check. Returns true when everything passed.
pub fn check_setup(config: &Config) -> bool {
    let mut ok = true;

    match config.validate() {
        Ok(()) => println!("config: ok"),
        Err(e) => {
            println!("config: {}", e);
            ok = false;
        }
    }

    match &config.synthesis.engine_command {
        None => {
            println!("engine: not configured (set synthesis.engine_command, LECTOR_ENGINE, or pass --engine)");
            ok = false;
        }
        Some(command) => {
            match CommandSynthesizer::from_command_line(command, config.synthesis.sample_rate) {
                Ok(engine) if engine.is_ready() => {
                    println!("engine: '{}' found", engine.name());
                }
                Ok(engine) => {
                    println!("engine: '{}' not found on PATH", engine.name());
                    ok = false;
                }
                Err(e) => {
                    println!("engine: {}", e);
                    ok = false;
                }
            }
        }
    }

    ok
}
