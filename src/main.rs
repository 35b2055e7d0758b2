use anyhow::Result;
use clap::Parser;
use question_convert::cli::Cli;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // 解析参数并运行（日志在加载配置后初始化）
    Cli::parse().run()
}
