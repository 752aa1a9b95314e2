//! Minimal obs-websocket server for driving the binary end to end.

use std::process::Output;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{WebSocketStream, accept_async};

pub const PASSWORD: &str = "supersecretpassword";
const SALT: &str = "lM1GncleQOaCu9lT1yeUZhFYnqhsLLP1G5lAGo3ixaI=";
const CHALLENGE: &str = "+IxH4CnCiqpX1rM9scsNynZzbOe4KhDeYcTNS3PDaeY=";
const AUTH: &str = "1Ct943GAT+6YQUUX47Ia/ncufilbe6+oD6lY+5kaCu4=";

type Socket = WebSocketStream<TcpStream>;

/// Serves a single client, then hands back the `d` payload of every request
/// it answered.
pub struct FakeObs {
	pub address: String,
	handle: JoinHandle<Vec<Value>>,
}

impl FakeObs {
	/// `scenes` are in service order; the program scene starts as the last one.
	pub async fn start(scenes: &[&str], authenticated: bool) -> Self {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let address = listener.local_addr().unwrap().to_string();
		let scenes = scenes.iter().map(|s| s.to_string()).collect();
		let handle = tokio::spawn(serve(listener, scenes, authenticated));
		Self { address, handle }
	}

	pub async fn requests(self) -> Vec<Value> {
		self.handle.await.unwrap()
	}
}

async fn serve(listener: TcpListener, scenes: Vec<String>, authenticated: bool) -> Vec<Value> {
	let (stream, _) = listener.accept().await.unwrap();
	let mut ws = accept_async(stream).await.unwrap();
	let mut current = scenes.last().cloned().unwrap_or_default();
	let mut requests = Vec::new();

	let authentication = authenticated.then(|| json!({ "challenge": CHALLENGE, "salt": SALT }));
	send(
		&mut ws,
		0,
		json!({ "obsWebSocketVersion": "5.5.2", "rpcVersion": 1, "authentication": authentication }),
	)
	.await;

	let Some(identify) = recv(&mut ws).await else {
		return requests;
	};
	if authenticated && identify["d"]["authentication"] != AUTH {
		let frame = CloseFrame {
			code: CloseCode::from(4009),
			reason: "Authentication failed.".into(),
		};
		let _ = ws.close(Some(frame)).await;
		while recv(&mut ws).await.is_some() {}
		return requests;
	}
	send(&mut ws, 2, json!({ "negotiatedRpcVersion": 1 })).await;

	while let Some(message) = recv(&mut ws).await {
		let d = message["d"].clone();
		let request_type = d["requestType"].as_str().unwrap_or_default().to_string();

		let data = match request_type.as_str() {
			"GetSceneList" => json!({
				"currentProgramSceneName": current,
				"currentPreviewSceneName": null,
				"scenes": scenes
					.iter()
					.enumerate()
					.map(|(i, name)| json!({ "sceneIndex": i, "sceneName": name }))
					.collect::<Vec<_>>(),
			}),
			"GetCurrentProgramScene" => json!({ "currentProgramSceneName": current }),
			"SetCurrentProgramScene" => {
				current = d["requestData"]["sceneName"].as_str().unwrap_or_default().to_string();
				Value::Null
			}
			"GetVersion" => json!({
				"obsVersion": "30.2.3",
				"obsWebSocketVersion": "5.5.2",
				"rpcVersion": 1,
				"platform": "ubuntu",
			}),
			_ => Value::Null,
		};

		let mut response = json!({
			"requestType": request_type,
			"requestId": d["requestId"],
			"requestStatus": { "result": true, "code": 100 },
		});
		if !data.is_null() {
			response["responseData"] = data;
		}
		requests.push(d);
		send(&mut ws, 7, response).await;
	}
	requests
}

async fn send(ws: &mut Socket, op: u8, d: Value) {
	ws.send(Message::Text(json!({ "op": op, "d": d }).to_string())).await.unwrap();
}

/// Next text frame, or `None` once the client is gone.
async fn recv(ws: &mut Socket) -> Option<Value> {
	loop {
		match ws.next().await {
			Some(Ok(Message::Text(text))) => return Some(serde_json::from_str(&text).unwrap()),
			Some(Ok(_)) => continue,
			Some(Err(_)) | None => return None,
		}
	}
}

/// Runs the `obs-switch` binary with a clean environment.
pub async fn obs_switch(args: &[&str]) -> Output {
	obs_switch_with_env(args, &[]).await
}

pub async fn obs_switch_with_env(args: &[&str], env: &[(&str, &str)]) -> Output {
	let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_obs-switch"));
	command.args(args).env_remove("OBS_SWITCH_PASSWORD").env_remove("RUST_LOG");
	for (key, value) in env {
		command.env(key, value);
	}
	command.output().await.expect("failed to execute obs-switch")
}

pub fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).to_string()
}
