// PView -- Interactive image viewport and gesture engine written in Rust
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of PView.
//
// PView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Result, Write},
    path::PathBuf,
    sync::OnceLock,
};

use log::debug;
use serde::{Deserialize, Serialize};

/// User preferences for the viewport engine.
///
/// Gesture semantics (scale ladder, clamping) are fixed; the preferences
/// only cover presentation choices a host application may want to expose.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Emit styles with transitions enabled where the gesture allows it
    #[serde(default = "default_animation")]
    pub animation: bool,
    /// Invert the wheel direction for zooming
    #[serde(default)]
    pub invert_wheel: bool,
}

fn default_animation() -> bool {
    true
}

impl Config {
    fn config_dir() -> PathBuf {
        let mut dir = dirs::config_dir().unwrap_or_default();
        dir.push("pview");
        dir
    }

    fn config_file() -> PathBuf {
        Self::config_dir().join("pview.json")
    }

    pub fn save(&self) -> Result<()> {
        create_dir_all(Self::config_dir())?;
        let file = File::create(Self::config_file())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation: true,
            invert_wheel: false,
        }
    }
}

fn read_config() -> Result<Config> {
    let file = File::open(Config::config_file())?;
    let config: Config = serde_json::from_reader(file)?;
    debug!("deserialized = {:?}", config);
    Ok(config)
}

pub fn config<'a>() -> &'a Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| read_config().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.animation);
        assert!(!config.invert_wheel);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.animation);
        assert!(!config.invert_wheel);

        let config: Config = serde_json::from_str(r#"{"invert_wheel": true}"#).unwrap();
        assert!(config.animation);
        assert!(config.invert_wheel);
    }
}
