use quail_viewer::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(document_path) => {
            log::info!("程式執行完成，檢視頁面：{}", document_path);
            println!("檢視頁面已產生：{}", document_path);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
