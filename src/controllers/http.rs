//! HTTP control surface
//!
//! Every control path answers 200 with a short plain-text confirmation,
//! echoing the resulting state even when the input was rejected. `/` serves
//! a small self-contained page and `/status` a JSON snapshot for it.

use core::fmt::Write as _;

use embassy_net::Stack;
use embassy_time::Instant;
use esp_println::println;
use heapless::String;
use serde::Serialize;

use binclock_core::command::Command;
use binclock_core::state::ClockState;

use crate::infrastructure::drivers::SharedDisplay;
use crate::infrastructure::services::{ClockStateService, SyncOutcome, WallClockService};
use crate::net::http::{HttpConnection, HttpHandler, HttpMethod, HttpResult};

const PAGE_BUFFER_SIZE: usize = 2048;
const REPLY_BUFFER_SIZE: usize = 64;

#[derive(Serialize)]
struct StatusSnapshot {
    time: String<8>,
    uptime: u64,
    mode: &'static str,
    brightness: u8,
    wifi: bool,
}

pub struct ClockHttpController {
    display: &'static SharedDisplay,
    stack: Stack<'static>,
    state: ClockStateService,
    clock: WallClockService,
}

impl ClockHttpController {
    pub fn new(display: &'static SharedDisplay, stack: Stack<'static>) -> Self {
        Self {
            display,
            stack,
            state: ClockStateService,
            clock: WallClockService,
        }
    }

    async fn serve_home(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let page = self.render_home_page()?;
        conn.write_html(page.as_bytes()).await
    }

    async fn serve_status(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let state = self.state.snapshot();
        let snapshot = StatusSnapshot {
            time: self.clock.now().format(),
            uptime: Instant::now().as_secs(),
            mode: state.mode.as_str(),
            brightness: state.brightness,
            wifi: self.stack.is_link_up(),
        };
        conn.write_json(&snapshot).await
    }

    async fn serve_sync(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        let reply = match self.state.request_sync().await {
            SyncOutcome::Synced => "Time synchronized",
            SyncOutcome::Failed => "Time sync failed",
            SyncOutcome::Pending => "Time sync started",
        };
        conn.write_text(200, reply).await
    }

    async fn serve_clear(&self, conn: &mut HttpConnection<'_>) -> HttpResult {
        if let Err(e) = self.display.lock().await.clear() {
            println!("http: display clear failed: {e:?}");
            return conn.write_text(500, "Display clear failed").await;
        }
        conn.write_text(200, "Display cleared").await
    }

    fn render_home_page(&self) -> Result<String<PAGE_BUFFER_SIZE>, core::fmt::Error> {
        let state = self.state.snapshot();
        let wifi = if self.stack.is_link_up() { "up" } else { "down" };

        let mut page: String<PAGE_BUFFER_SIZE> = String::new();
        page.write_str(PAGE_HEAD)?;
        write!(page, "<div id=\"time\">{}</div>", self.clock.now().format())?;
        write!(
            page,
            "<p>mode <span id=\"mode\">{}</span> | \
             brightness <span id=\"bri\">{}</span>% | \
             wifi <span id=\"wifi\">{}</span></p>",
            state.mode.as_str(),
            state.brightness,
            wifi,
        )?;
        page.write_str(PAGE_MODE_BUTTONS)?;
        write!(
            page,
            "<p><button onclick=\"cmd('brightness/down')\">-</button>\
             <input type=\"range\" min=\"10\" max=\"100\" step=\"10\" value=\"{}\" \
             onchange=\"cmd('brightness/'+this.value)\">\
             <button onclick=\"cmd('brightness/up')\">+</button></p>",
            state.brightness,
        )?;
        page.write_str(PAGE_TAIL)?;
        Ok(page)
    }
}

impl HttpHandler for ClockHttpController {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult {
        let mut conn = conn;
        if !matches!(conn.method, HttpMethod::Get) {
            conn.write_text(405, "Method Not Allowed").await?;
            return conn.finish().await;
        }

        match Command::parse(conn.path.as_str()) {
            Command::Home => self.serve_home(&mut conn).await?,
            Command::Status => self.serve_status(&mut conn).await?,
            Command::SetMode(mode) => {
                let state = self.state.set_mode(mode);
                reply_mode(&mut conn, state).await?;
            }
            Command::ModeUnknown => {
                // Unknown mode names leave the state alone and echo it
                let state = self.state.snapshot();
                let mut reply: String<REPLY_BUFFER_SIZE> = String::new();
                write!(reply, "Mode is {}", state.mode.as_str())?;
                conn.write_text(200, reply.as_str()).await?;
            }
            Command::BrightnessUp => {
                let state = self.state.brightness_up();
                reply_brightness(&mut conn, state).await?;
            }
            Command::BrightnessDown => {
                let state = self.state.brightness_down();
                reply_brightness(&mut conn, state).await?;
            }
            Command::SetBrightness(value) => {
                let state = self.state.set_brightness(value);
                reply_brightness(&mut conn, state).await?;
            }
            Command::BrightnessInvalid => {
                let state = self.state.snapshot();
                reply_brightness(&mut conn, state).await?;
            }
            Command::Sync => self.serve_sync(&mut conn).await?,
            Command::Clear => self.serve_clear(&mut conn).await?,
            Command::NotFound => conn.write_text(404, "Not Found").await?,
        }
        conn.finish().await
    }
}

async fn reply_mode(conn: &mut HttpConnection<'_>, state: ClockState) -> HttpResult {
    let mut reply: String<REPLY_BUFFER_SIZE> = String::new();
    write!(reply, "Mode changed to {}", state.mode.as_str())?;
    conn.write_text(200, reply.as_str()).await
}

async fn reply_brightness(conn: &mut HttpConnection<'_>, state: ClockState) -> HttpResult {
    let mut reply: String<REPLY_BUFFER_SIZE> = String::new();
    write!(reply, "Brightness set to {}%", state.brightness)?;
    conn.write_text(200, reply.as_str()).await
}

const PAGE_HEAD: &str = "<!DOCTYPE html><html><head><title>Binary Clock</title>\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<style>body{background:#111;color:#f7d;font-family:monospace;text-align:center}\
button{background:#222;color:#f7d;border:1px solid #f7d;padding:8px 14px;margin:4px}\
#time{font-size:2.2em;margin:12px}.dim{color:#777}</style></head><body>\
<h1>Binary Clock</h1>";

const PAGE_MODE_BUTTONS: &str = "<p>\
<button onclick=\"cmd('mode/binary')\">binary</button>\
<button onclick=\"cmd('mode/rainbow')\">rainbow</button></p>";

const PAGE_TAIL: &str = "<p>\
<button onclick=\"cmd('sync')\">sync</button>\
<button onclick=\"cmd('clear')\">clear</button></p>\
<p class=\"dim\">rows 1-2 hours, rows 3-4 minutes, bottom row marks even seconds</p>\
<script>\
function cmd(p){fetch('/'+p).then(refresh)}\
function refresh(){fetch('/status').then(r=>r.json()).then(s=>{\
time.textContent=s.time;mode.textContent=s.mode;bri.textContent=s.brightness;\
wifi.textContent=s.wifi?'up':'down'})}\
setInterval(refresh,1000)\
</script></body></html>";
