/*!
# basehost

Query the hostname of this computer and append it to a fixed prefix, without writing past a bounded buffer.

```rust
use basehost::{banner::BannerConfig, hostname::SystemHostname, printer::HostnamePrinter};

let printer = HostnamePrinter::new(SystemHostname::new(), BannerConfig::default());

let banner = printer.build().unwrap();

assert!(banner.as_bytes().starts_with(b"Base string: "));
```
*/

pub mod banner;
pub mod hostname;
pub mod printer;
