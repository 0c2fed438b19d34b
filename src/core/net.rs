// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only, no TLS). The league app listens on a
// plain-HTTP dev port, and HTTP/1.0 with Connection: close means the
// server ends the stream for us (no chunked transfer to deal with).

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::config::consts::TIMEOUT_SECS;
use crate::config::options::Endpoint;

pub fn http_get(ep: &Endpoint) -> Result<String, Box<dyn std::error::Error>> {
    let mut s = TcpStream::connect((ep.host.as_str(), ep.port))?;
    s.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}:{}\r\nAccept: application/json\r\nUser-Agent: player_lookup/0.2\r\nConnection: close\r\n\r\n",
        ep.path, ep.host, ep.port
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status_is_ok(status) {
        return Err(format!("HTTP error: {} ({})", status, ep.display()).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

/// Second token of the status line must be exactly "200".
/// A 404 body containing the digits 200 is not a success.
fn status_is_ok(status_line: &str) -> bool {
    status_line.split_whitespace().nth(1) == Some("200")
}

#[cfg(test)]
mod tests {
    use super::status_is_ok;

    #[test]
    fn status_line_checks_code_token_only() {
        assert!(status_is_ok("HTTP/1.0 200 OK"));
        assert!(status_is_ok("HTTP/1.1 200"));
        assert!(!status_is_ok("HTTP/1.0 404 Not Found"));
        assert!(!status_is_ok("HTTP/1.0 500 200s everywhere"));
        assert!(!status_is_ok(""));
    }
}
