//! FlowTrace CLI 工具
//!
//! 加载图描述，运行最大流引擎，输出执行轨迹

use anyhow::{bail, Context, Result};
use clap::Parser;
use flowtrace::{import, FordFulkerson, GraphBuilder, GraphValidator, StepKind};
use prettytable::{format, row, Table};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flowtrace-cli")]
#[command(about = "FlowTrace 最大流轨迹计算工具")]
struct Args {
    /// 图描述 JSON 文件
    #[arg(short, long)]
    input: PathBuf,

    /// 将步骤序列导出为 JSON 文件
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 保留边列表中的初始流量（默认清零后运行）
    #[arg(long)]
    keep_initial_flow: bool,

    /// 打印每一步的完整解释文本
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("FlowTrace - 最大流轨迹计算引擎 v{}", flowtrace::VERSION);
    println!("=========================================");

    let description = import::load_description(&args.input)
        .with_context(|| format!("无法加载图描述: {}", args.input.display()))?;

    let validation = GraphValidator::validate(&description);
    if !validation.is_valid {
        bail!("图校验失败: {}", validation.message);
    }

    println!("图描述已加载: {}", args.input.display());
    println!("  节点数: {}", description.nodes.len());
    println!("  边数: {}", description.edges.len());
    println!("  源点: {}, 汇点: {}", description.source, description.sink);

    let (graph, flow) = GraphBuilder::from_edges(&description.edges);
    let capacities = graph.clone();

    let mut engine = if args.keep_initial_flow {
        FordFulkerson::with_initial_flow(graph, flow, &description.source, &description.sink)
    } else {
        FordFulkerson::new(graph, &description.source, &description.sink)
    };

    let max_flow = engine.run().context("算法执行失败")?;

    println!();
    if args.verbose {
        for step in engine.get_steps() {
            println!("--- 步骤 {} (iteration {}) ---", step_label(step.kind), step.iteration);
            println!("{}\n", step.explanation);
        }
    } else {
        for step in engine.get_steps() {
            if step.kind == StepKind::PathFound {
                if let Some(path) = &step.path {
                    println!(
                        "迭代 {}: 增广路径 {} (Δ = {})",
                        step.iteration,
                        path.join(" → "),
                        step.bottleneck
                    );
                }
            }
        }
    }

    // 最终流量表
    let final_flow = engine.get_final_flow();
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["边", "容量", "流量", "残量"]);
    for (u, neighbors) in &capacities {
        for (v, &capacity) in neighbors {
            let f = final_flow.get(u).and_then(|m| m.get(v)).copied().unwrap_or(0);
            table.add_row(row![format!("{} → {}", u, v), capacity, f, capacity - f]);
        }
    }
    table.printstd();

    // 最小割
    if let Some(cut) = engine
        .get_steps()
        .last()
        .and_then(|step| step.min_cut.as_ref())
    {
        let source_side: Vec<&str> = cut.source_partition.iter().map(|n| n.as_str()).collect();
        let sink_side: Vec<&str> = cut.sink_partition.iter().map(|n| n.as_str()).collect();
        println!("最小割 (前向残量可达性):");
        println!("  S = {{{}}}", source_side.join(", "));
        println!("  T = {{{}}}", sink_side.join(", "));

        let mut cut_table = Table::new();
        cut_table.set_format(*format::consts::FORMAT_BOX_CHARS);
        cut_table.set_titles(row!["割边", "容量"]);
        for (u, v) in &cut.cut_edges {
            cut_table.add_row(row![format!("{} → {}", u, v), capacities[u][v]]);
        }
        cut_table.printstd();
        println!("  割值: {}", cut.cut_value);
    }

    println!("\n最大流: {}", max_flow);
    let stats = engine.stats();
    println!(
        "迭代 {} 次, 增广路径 {} 条, 记录步骤 {} 条, 耗时 {} ms",
        stats.iterations, stats.augmenting_paths, stats.steps_recorded, stats.duration_ms
    );

    if let Some(path) = args.output {
        let json = serde_json::to_string_pretty(engine.get_steps())?;
        std::fs::write(&path, json)
            .with_context(|| format!("无法写入轨迹文件: {}", path.display()))?;
        println!("轨迹已导出: {}", path.display());
    }

    Ok(())
}

fn step_label(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Initial => "initial",
        StepKind::PathFound => "path_found",
        StepKind::FlowUpdated => "flow_updated",
        StepKind::Complete => "complete",
    }
}
