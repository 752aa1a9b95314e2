//! obs-switch: Scene Switch Engine for OBS Studio
//!
//! Switches the program scene of a running OBS instance over obs-websocket v5,
//! lists its scenes, and toggles between them with wraparound.
//!
//! Every operation opens one session, fetches the scene list, resolves the
//! target, issues at most one mutation, and closes the session again, on
//! success and on every error path alike.
//!
//! # Example
//!
//! ```ignore
//! use obs_switch::{ObsConnector, SessionConfig, SwitchIntent, switch_scene};
//!
//! #[tokio::main]
//! async fn main() -> obs_switch::Result<()> {
//!     let config = SessionConfig::new("localhost:4455").with_password(Some("secret".into()));
//!
//!     // Index 0 is the scene at the top of the OBS scene dock.
//!     let scene = switch_scene(&ObsConnector, &config, SwitchIntent::ByIndex(0)).await?;
//!     println!("now live: {}", scene.name);
//!     Ok(())
//! }
//! ```
//!
//! # Scene order
//!
//! OBS reports scenes bottom-up. Everything the operator sees or indexes is in
//! presentation order (top-down); see [`resolver`] for the one exception.

pub mod engine;
pub mod error;
pub mod intent;
pub mod resolver;
pub mod scene;
pub mod session;
pub mod testing;

pub use engine::{current_scene, list_scenes, switch_scene, version};
pub use error::{Error, IndexError, Result, SceneAction, ToggleError};
pub use intent::{SwitchIntent, parse_index};
pub use resolver::{ensure_not_empty, presentation_order, resolve_by_index, resolve_toggle};
pub use scene::{SceneCollection, SceneRef, VersionInfo};
pub use session::{Connector, DEFAULT_SERVER, ObsConnector, ObsSession, SceneService, SessionConfig, with_session};

/// Source of the intent parser, resolver, session manager, engine and error
/// taxonomy, as compiled into this build. Printed by `obs-switch dump-code`.
pub const EMBEDDED_SOURCE: &str = concat!(
	"// intent.rs\n",
	include_str!("intent.rs"),
	"\n// resolver.rs\n",
	include_str!("resolver.rs"),
	"\n// session.rs\n",
	include_str!("session.rs"),
	"\n// engine.rs\n",
	include_str!("engine.rs"),
	"\n// error.rs\n",
	include_str!("error.rs"),
);
