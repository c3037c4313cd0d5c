// ==========================================
// 酒店客房库存 - 命令行入口
// ==========================================
// 用法:
//   hotel-inventory room-info
//   hotel-inventory rates-on <date>
//   hotel-inventory rooms-by-price <price>
//   hotel-inventory actions [limit]
//   hotel-inventory config [key value]
//
// 数据库: HOTEL_INVENTORY_DB_PATH，否则用户数据目录
// 输出: 统一 JSON 响应 (stdout)，日志写 stderr
// ==========================================

use std::process::ExitCode;

use hotel_inventory::app::{commands, get_default_db_path, ApiResponse, AppState};
use hotel_inventory::logging;

const USAGE: &str = "用法: hotel-inventory <room-info | rates-on <date> | rooms-by-price <price> | actions [limit] | config [key value]>";

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let db_path = get_default_db_path();
    tracing::info!(version = hotel_inventory::VERSION, db_path = %db_path, "{}", hotel_inventory::APP_NAME);

    let state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("AppState初始化失败: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let response = match (command.as_str(), &args[1..]) {
        ("room-info", []) => commands::get_room_info(&state),
        ("rates-on", [date]) => commands::get_rates_in_force(&state, date),
        ("rooms-by-price", [price]) => match price.trim().parse::<f64>() {
            Ok(price) => commands::get_rooms_by_price(&state, price),
            Err(_) => {
                eprintln!("价格必须是数字: {}", price);
                return ExitCode::from(2);
            }
        },
        ("actions", []) => commands::list_recent_actions(&state, 20),
        ("actions", [limit]) => match limit.trim().parse::<i32>() {
            Ok(limit) => commands::list_recent_actions(&state, limit),
            Err(_) => {
                eprintln!("limit必须是整数: {}", limit);
                return ExitCode::from(2);
            }
        },
        ("config", []) => commands::get_config_snapshot(&state),
        ("config", [key, value]) => commands::set_config_value(&state, key, value),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    print_response(&response)
}

fn print_response(response: &ApiResponse) -> ExitCode {
    println!("{}", response.to_json());
    if response.is_success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
