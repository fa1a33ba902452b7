//! Interactive countdown demo.
//!
//! Type a duration into the hours/minutes/seconds fields (tab moves
//! between them), then `s` or enter to start, `p` or space to
//! pause/resume, `r` to reset and `q` to quit.

use bubbletea_countdown::prelude::*;
use bubbletea_rs::{Cmd, Model, Msg, Program};

struct App {
    panel: CountdownPanel,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut panel = panel_new();
        // something sensible to start from; edit before starting
        panel.inputs_mut().set_values("0", "0", "10");
        (App { panel }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.panel.update(msg)
    }

    fn view(&self) -> String {
        format!("\n  {}\n", self.panel.view().replace('\n', "\n  "))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
