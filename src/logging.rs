// console output macros, all exported at the crate root so modules can `use crate::nay;`

#[macro_export]
macro_rules! log_line {
    ($color:expr, $tag:expr, $($arg:tt)*) => {
        println!(
            "{}[{}] {}{} {}{}",
            better_term::Color::BrightBlack,
            chrono::Local::now().format("%H:%M:%S"),
            $color,
            $tag,
            format!($($arg)*),
            better_term::Color::White
        )
    };
}

/// success
#[macro_export]
macro_rules! yay {
    ($($arg:tt)*) => {
        $crate::log_line!(better_term::Color::BrightGreen, "+", $($arg)*)
    };
}

/// general info
#[macro_export]
macro_rules! say {
    ($($arg:tt)*) => {
        $crate::log_line!(better_term::Color::BrightCyan, "~", $($arg)*)
    };
}

/// warnings, things that went wrong but can be recovered from
#[macro_export]
macro_rules! hey {
    ($($arg:tt)*) => {
        $crate::log_line!(better_term::Color::BrightYellow, "!", $($arg)*)
    };
}

/// errors
#[macro_export]
macro_rules! nay {
    ($($arg:tt)*) => {
        $crate::log_line!(better_term::Color::BrightRed, "x", $($arg)*)
    };
}
