#[macro_use]
extern crate openskat_util;
use itertools::Itertools;

pub use log::{trace, debug, info, warn, error};

pub fn init_logging() -> Result<(), failure::Error> {
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .level(if_dbg_else!({log::LevelFilter::Trace}{log::LevelFilter::Info}))
        .chain(std::io::stderr())
        .apply()?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!("Started: {}", std::env::args()
        .format_with(
            /*sep*/" ",
            |str_arg, formatter| {
                formatter(&format_args!("\"{}\"", str_arg))
            },
        )
    );
    Ok(())
}
