/// Best-effort address other machines on the LAN can reach this host on.
/// Returns `None` when nothing better than loopback is found.
#[cfg(not(target_arch = "wasm32"))]
pub fn discover_local_ip() -> Option<String> {
    use std::net::UdpSocket;

    // connect() on UDP only picks a route, nothing is sent.
    const PROBE_ADDR: (&str, u16) = ("8.8.8.8", 80);

    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    socket.connect(PROBE_ADDR).ok()?;
    let ip = socket.local_addr().ok()?.ip();
    usable(ip).then(|| ip.to_string())
}

/// In the browser the page's own host is the closest thing to a server address.
#[cfg(target_arch = "wasm32")]
pub fn discover_local_ip() -> Option<String> {
    let hostname = web_sys::window()?.location().hostname().ok()?;
    match hostname.parse::<std::net::IpAddr>() {
        Ok(ip) => usable(ip).then_some(hostname),
        Err(_) if hostname.is_empty() || hostname == "localhost" => None,
        Err(_) => Some(hostname),
    }
}

fn usable(ip: std::net::IpAddr) -> bool {
    !ip.is_loopback() && !ip.is_unspecified()
}

/// `host` with IPv6 literals bracketed, ready to go in front of `:port`.
pub fn url_host(host: &str) -> String {
    match host.parse::<std::net::IpAddr>() {
        Ok(std::net::IpAddr::V6(_)) => format!("[{}]", host),
        _ => host.to_string(),
    }
}
